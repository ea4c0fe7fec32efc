/// PEM bytes for each artifact. `ca_key` is absent when the bundle came
/// from the remote issuer, which never hands out the CA key.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateBundle {
    pub ca_cert: Vec<u8>,
    pub ca_key: Option<Vec<u8>>,
    pub host_cert: Vec<u8>,
    pub host_key: Vec<u8>,
}
