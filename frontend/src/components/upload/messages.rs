#[derive(Clone)]
pub enum Msg {
    FileSelected(web_sys::File),
    TitleChanged(String),
    DescriptionChanged(String),
    Submit,
    /// The one ingestion request settled: `Ok` carries the new record id,
    /// `Err` is any failure (non-2xx, transport fault, malformed body).
    Settled(Result<i64, ()>),
}
