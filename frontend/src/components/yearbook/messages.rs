use crate::api::HttpError;
use crate::export::ExportOutcome;
use crate::normalize::{Normalized, StudentView};

pub enum Msg {
    /// Fetch finished. `epoch` identifies the fetch that produced the result;
    /// anything but the current epoch is dropped.
    StudentsLoaded {
        epoch: u32,
        result: Result<Normalized<StudentView>, HttpError>,
    },
    SearchChanged(String),
    DepartmentChanged(String),
    ShowCertificate(i64),
    DismissCertificate,
    DownloadCertificate(i64),
    DownloadFinished(ExportOutcome),
}
