/// One newsletter recipient as reported by the backend.
///
/// The id is assigned server-side and treated as opaque; the client never
/// constructs one itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
}
