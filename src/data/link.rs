use std::sync::Arc;

use url::Url;

/// A `/move/<token>` or `/share/<token>` link produced by the client or
/// handed to it on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppLink {
    Move(Arc<str>),
    Share(Arc<str>),
}

impl AppLink {
    pub fn parse(link: &str) -> Option<Self> {
        let url = Url::parse(link).ok()?;
        let mut segments = url.path_segments()?;
        let kind = segments.next()?;
        let token = segments.next()?;
        if token.is_empty() {
            return None;
        }
        match kind {
            "move" => Some(Self::Move(token.into())),
            "share" => Some(Self::Share(token.into())),
            _ => None,
        }
    }
}

pub fn move_link(origin: &str, secret: &str) -> String {
    format!("{}/move/{}", origin, secret)
}

pub fn share_link(origin: &str, secret: &str) -> String {
    format!("{}/share/{}", origin, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_produced_links() {
        let origin = "https://planevent.me";
        assert_eq!(
            AppLink::parse(&move_link(origin, "s3cret")),
            Some(AppLink::Move("s3cret".into()))
        );
        assert_eq!(
            AppLink::parse(&share_link(origin, "s3cret")),
            Some(AppLink::Share("s3cret".into()))
        );
    }

    #[test]
    fn rejects_foreign_links() {
        assert_eq!(AppLink::parse("https://planevent.me/"), None);
        assert_eq!(AppLink::parse("https://planevent.me/move/"), None);
        assert_eq!(AppLink::parse("https://planevent.me/donate/xyz"), None);
        assert_eq!(AppLink::parse("not a url"), None);
    }
}
