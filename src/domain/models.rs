use serde::Deserialize;

/// A news article as returned by the content API. Only `title` is
/// interpreted; every other field is carried through untouched.
pub type Article = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToProcess {
    pub bucket: String,
    pub key: String,
}

/// A rectangular table: every row has exactly `headers.len()` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
