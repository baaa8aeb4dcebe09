use super::client::HttpClient;

pub struct BasicClient(reqwest::blocking::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::blocking::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for BasicClient {
    fn execute(
        &self,
        req: reqwest::blocking::Request,
    ) -> reqwest::Result<reqwest::blocking::Response> {
        self.0.execute(req)
    }
}
