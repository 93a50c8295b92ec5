//! A local HTTP server answering with canned responses, so the api modules can
//! be exercised without reaching GitHub or Google.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Request line target and headers of one request the server received.
#[derive(Debug, Clone)]
pub struct Received {
    pub target: String,
    headers: Vec<(String, String)>,
}

impl Received {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn parse(head: &str) -> Self {
        let mut lines = head.split("\r\n");

        let target = lines
            .next()
            .and_then(|line| line.split(' ').nth(1))
            .unwrap_or_default()
            .to_owned();

        let headers = lines
            .take_while(|line| !line.is_empty())
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_owned()))
            .collect();

        Self { target, headers }
    }
}

#[derive(Debug, Clone)]
pub struct Canned {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl Canned {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl ToString) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    fn to_http(&self) -> String {
        let mut response = format!(
            "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n",
            self.status,
            self.body.len()
        );

        for (name, value) in &self.headers {
            response.push_str(&format!("{name}: {value}\r\n"));
        }

        response.push_str("\r\n");
        response.push_str(&self.body);
        response
    }
}

pub struct Server {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl Server {
    /// Binds an ephemeral port on 127.0.0.1 and answers every request with `respond`.
    pub async fn spawn<F>(respond: F) -> Self
    where
        F: Fn(&Received) -> Canned + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("loopback should bind");
        let addr = listener.local_addr().expect("listener should have an address");

        let received = Arc::new(Mutex::new(Vec::new()));
        let respond = Arc::new(respond);

        let log = Arc::clone(&received);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let respond = Arc::clone(&respond);
                let log = Arc::clone(&log);

                tokio::spawn(async move { serve(stream, respond.as_ref(), &log).await });
            }
        });

        Self { addr, received }
    }

    pub fn url(&self, path: &str) -> url::Url {
        format!("http://{}{path}", self.addr)
            .parse()
            .expect("server url should parse")
    }

    /// Everything received so far, in arrival order.
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().expect("lock poisoned").clone()
    }
}

async fn serve<F>(mut stream: TcpStream, respond: &F, log: &Mutex<Vec<Received>>)
where
    F: Fn(&Received) -> Canned,
{
    let mut head = Vec::new();
    let mut chunk = [0; 1024];

    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    let request = Received::parse(&String::from_utf8_lossy(&head));
    let response = respond(&request).to_http();
    log.lock().expect("lock poisoned").push(request);

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
