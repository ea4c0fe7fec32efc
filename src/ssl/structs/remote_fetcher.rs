pub struct RemoteFetcher {
    pub(crate) client: reqwest::Client,
    pub(crate) end_point_ca: String,
    pub(crate) end_point_host: String,
    pub(crate) end_point_host_key: String,
    pub(crate) permission_hash: String,
}
