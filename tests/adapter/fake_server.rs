//! Scripted HTTP server standing in for the remote APIs

use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tiny_http::{Header, Response, Server};

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

type Route = dyn Fn(&str, &str) -> (u16, String) + Send + Sync;

/// Serves canned responses on a random local port until dropped
pub struct FakeServer {
    server: Arc<Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    worker: Option<JoinHandle<()>>,
}

impl FakeServer {
    /// Start a server that answers every request with `route(method, url)`
    pub fn start(route: impl Fn(&str, &str) -> (u16, String) + Send + Sync + 'static) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let route: Box<Route> = Box::new(route);

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);

                    let recorded = Recorded {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        authorization: request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("Authorization"))
                            .map(|h| h.value.as_str().to_string()),
                        body,
                    };
                    let (status, payload) = route(&recorded.method, &recorded.url);
                    requests.lock().unwrap().push(recorded);

                    let content_type =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                    let response =
                        Response::from_string(payload).with_status_code(status).with_header(content_type);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            requests,
            worker: Some(worker),
        }
    }

    /// Base URL of the server, without a trailing slash
    pub fn base_url(&self) -> String {
        let addr = self.server.server_addr().to_ip().unwrap();
        format!("http://{addr}")
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
