use std::io::Read;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::error::DataError;

use super::model::{CellValue, DataTable};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something that can hand back the raw bytes behind a dataset URL.
pub trait CsvSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DataError>;
}

/// Fetches datasets over HTTP(S) with a `ureq` agent.
pub struct HttpSource {
    agent: ureq::Agent,
    max_bytes: usize,
}

impl HttpSource {
    pub fn new(config: &DashboardConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(config.connect_timeout_secs))
            .timeout_read(Duration::from_secs(config.read_timeout_secs))
            .user_agent(concat!("alien-dashboard/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            max_bytes: config.max_response_bytes,
        }
    }
}

impl CsvSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DataError> {
        let fetch_err = |reason: String| DataError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(fetch_err(format!(
                    "HTTP {code} {}",
                    response.status_text()
                )));
            }
            Err(ureq::Error::Transport(err)) => return Err(fetch_err(err.to_string())),
        };

        // Read one byte past the limit so oversized bodies are detectable.
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take((self.max_bytes as u64).saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| fetch_err(e.to_string()))?;
        if bytes.len() > self.max_bytes {
            return Err(fetch_err(format!(
                "response exceeded {} bytes",
                self.max_bytes
            )));
        }
        Ok(bytes)
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Fetch `url` from `source` and parse it as CSV.
pub fn load_table(source: &dyn CsvSource, url: &str) -> Result<DataTable, DataError> {
    let bytes = source.fetch(url)?;
    let table = parse_csv(&bytes, url)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {url}",
        table.len(),
        table.column_names()
    );
    Ok(table)
}

/// CSV layout: a header row with column names, then one record per row.
/// Every record must have as many fields as the header.
pub fn parse_csv(bytes: &[u8], url: &str) -> Result<DataTable, DataError> {
    let csv_err = |source: csv::Error| DataError::Csv {
        url: url.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::Empty {
            url: url.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(DataTable::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/data.csv")
    }

    fn source() -> HttpSource {
        HttpSource::new(&DashboardConfig::default())
    }

    #[test]
    fn parses_header_and_typed_cells() {
        let csv = b"planet,crew,success\nMars,3,True\nVenus,,False\n";
        let table = parse_csv(csv, "mem://t").unwrap();
        assert_eq!(table.column_names(), vec!["planet", "crew", "success"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns[1].values[0], CellValue::Integer(3));
        assert_eq!(table.columns[1].values[1], CellValue::Null);
        assert_eq!(table.columns[2].values[1], CellValue::Bool(false));
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let err = parse_csv(b"a,b\n1,2\n3\n", "mem://t").unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = parse_csv(b"", "mem://t").unwrap_err();
        assert!(matches!(err, DataError::Empty { .. }));
    }

    #[test]
    fn header_only_input_is_an_empty_table() {
        let table = parse_csv(b"a,b\n", "mem://t").unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert!(table.is_empty());
    }

    #[test]
    fn http_fetch_returns_body() {
        let body = "x\n1\n2\n";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let table = load_table(&source(), &url).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn http_error_status_is_a_fetch_error() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string());
        let err = source().fetch(&url).unwrap_err();
        match err {
            DataError::Fetch { reason, .. } => assert!(reason.contains("404")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn oversized_body_is_rejected() {
        let mut config = DashboardConfig::default();
        config.max_response_bytes = 8;
        let body = "a".repeat(32);
        let url = serve_once(format!("HTTP/1.0 200 OK\r\n\r\n{body}"));
        let err = HttpSource::new(&config).fetch(&url).unwrap_err();
        assert!(matches!(err, DataError::Fetch { .. }));
    }

    #[test]
    fn unbounded_body_limit_still_reads_the_body() {
        let mut config = DashboardConfig::default();
        config.max_response_bytes = usize::MAX;
        let body = "x\n1\n";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let table = load_table(&HttpSource::new(&config), &url).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unreachable_host_is_a_fetch_error() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/missing.csv");
        let err = source().fetch(&url).unwrap_err();
        assert!(matches!(err, DataError::Fetch { .. }));
    }
}
