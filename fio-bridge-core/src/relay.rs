use crate::{
    command::{CommandBuilder, CommandError},
    module::{ModuleHandle, SendError},
    msg::Message,
    projector::ResultProjector,
    render::Renderer,
};
use fio_bridge_derive::Error;
use log::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    Command(CommandError),
    Send(SendError),
}

/// URL paired with the body downloaded from it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResult {
    pub url: String,
    pub body: String,
}

impl FetchResult {
    /// Splits on the first newline only; the body may hold any number of
    /// further newlines. Input without a newline is incomplete and yields
    /// `None`.
    pub fn parse(combined: &str) -> Option<Self> {
        let pos = combined.find('\n')?;
        Some(Self {
            url: combined[..pos].to_string(),
            body: combined[pos + 1..].to_string(),
        })
    }

    /// Path the body is saved under
    pub fn target_path(&self) -> String {
        format!("/{}", self.url)
    }
}

/// Re-issues a finished URL fetch as a save on the file system subsystem
pub struct UrlFetchRelay;

impl UrlFetchRelay {
    /// Works out the save to send for a fetch reply, if any
    ///
    /// A body holding the field separator may reach us as several fields, so
    /// the payload is rejoined before the url is split off.
    pub fn plan(payload: &[String]) -> Result<Option<(FetchResult, Message)>, CommandError> {
        let combined = ResultProjector::rejoin(payload);
        let result = match FetchResult::parse(&combined) {
            Some(x) => x,
            None => return Ok(None),
        };

        let msg = CommandBuilder::save(result.target_path(), result.body.as_str())?;
        Ok(Some((result, msg)))
    }

    /// Sends the save and logs the url; malformed payloads are dropped
    /// without sending or surfacing anything
    pub async fn relay<R: Renderer + ?Sized>(
        module: &ModuleHandle,
        payload: &[String],
        renderer: &mut R,
    ) -> Result<Option<FetchResult>, RelayError> {
        match Self::plan(payload).map_err(RelayError::Command)? {
            Some((result, msg)) => {
                module.post(msg).await.map_err(RelayError::Send)?;
                renderer.log(&result.url);
                Ok(Some(result))
            }
            None => {
                debug!("Dropping fetch result without separator: {:?}", payload);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{msg::Reply, render::RecordingRenderer, Transmission, WireFormat};
    use tokio::sync::mpsc;

    fn payload(combined: &str) -> Vec<String> {
        vec![combined.to_string()]
    }

    #[test]
    fn parse_should_split_on_first_newline_only() {
        assert_eq!(
            FetchResult::parse("page.html\n<p>\n</p>\n"),
            Some(FetchResult {
                url: String::from("page.html"),
                body: String::from("<p>\n</p>\n"),
            })
        );
    }

    #[test]
    fn parse_should_allow_trailing_newline_with_empty_body() {
        assert_eq!(
            FetchResult::parse("a.bmp\n"),
            Some(FetchResult {
                url: String::from("a.bmp"),
                body: String::new(),
            })
        );
    }

    #[test]
    fn parse_without_newline_should_be_none() {
        assert_eq!(FetchResult::parse("foo.bmp"), None);
    }

    #[test]
    fn plan_should_build_save_under_root() {
        let (result, msg) = UrlFetchRelay::plan(&payload("foo.bmp\nhello"))
            .unwrap()
            .unwrap();

        assert_eq!(result.url, "foo.bmp");
        assert_eq!(msg.to_wire(), vec!["FILEIO", "save", "/foo.bmp", "hello"]);
    }

    #[test]
    fn plan_should_keep_body_split_on_separator() {
        let piped = WireFormat::Piped;
        let data = piped
            .encode(&Transmission::from(vec![
                String::from("URLLOADER"),
                String::from("page.html\n<a|b>"),
            ]))
            .unwrap();
        let msg = Message::from_transmission(piped.decode(&data).unwrap()).unwrap();

        let payload = match Reply::from(msg) {
            Reply::Fetched(x) => x,
            x => panic!("Unexpected reply: {:?}", x),
        };
        assert_eq!(payload.len(), 2);

        let (result, save) = UrlFetchRelay::plan(&payload).unwrap().unwrap();
        assert_eq!(result.body, "<a|b>");
        assert_eq!(save.to_wire(), vec!["FILEIO", "save", "/page.html", "<a|b>"]);
    }

    #[test]
    fn plan_should_ignore_empty_payload() {
        assert_eq!(UrlFetchRelay::plan(&[]), Ok(None));
    }

    #[tokio::test]
    async fn relay_should_send_save_then_log_url() {
        let (tx, mut rx) = mpsc::channel(1);
        let module = ModuleHandle::new(tx);
        let mut renderer = RecordingRenderer::new();

        UrlFetchRelay::relay(&module, &payload("a.bmp\n"), &mut renderer)
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(Transmission::Fields(vec![
                String::from("FILEIO"),
                String::from("save"),
                String::from("/a.bmp"),
                String::new(),
            ]))
        );
        assert_eq!(renderer.logs(), vec!["a.bmp"]);
    }

    #[tokio::test]
    async fn relay_should_drop_payload_without_newline() {
        let (tx, mut rx) = mpsc::channel(1);
        let module = ModuleHandle::new(tx);
        let mut renderer = RecordingRenderer::new();

        let result = UrlFetchRelay::relay(&module, &payload("foo.bmp"), &mut renderer)
            .await
            .unwrap();

        assert_eq!(result, None);
        assert!(renderer.events.is_empty());
        drop(module);
        assert_eq!(rx.recv().await, None);
    }
}
