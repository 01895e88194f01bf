use super::UploadRequest;

pub enum Action {
    SendRequest(UploadRequest),
}
