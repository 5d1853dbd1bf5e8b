//! Keeps at most one live log subscription and swaps it when the
//! connection settings or the minimum level change.

use crate::api::error::ApiError;
use shared::types::{api_config::ApiConfig, log_level::LogLevel, log_message::LogMessage};
use std::rc::Rc;

pub type OnMessage = Rc<dyn Fn(LogMessage)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRequest {
    pub config: ApiConfig,
    pub level: LogLevel,
}

/// The request the live stream should match; `None` while the level is unknown.
pub fn request_for(level: Option<LogLevel>, config: ApiConfig) -> Option<SubscribeRequest> {
    level.map(|level| SubscribeRequest { config, level })
}

/// Something that can stream log records for a request.
///
/// Dropping the returned handle must stop delivery to `on_message`.
pub trait LogSource {
    type Handle;

    fn subscribe(
        &self,
        request: &SubscribeRequest,
        on_message: OnMessage,
    ) -> Result<Self::Handle, ApiError>;
}

pub struct LogFeed<S: LogSource> {
    source: S,
    current: Option<(SubscribeRequest, S::Handle)>,
}

impl<S: LogSource> LogFeed<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// Bring the live subscription in line with `request`.
    ///
    /// Returns `Ok(true)` when a new subscription was opened. An unchanged
    /// request leaves the current one alone; `None` or a silent level only
    /// closes it.
    pub fn sync(
        &mut self,
        request: Option<SubscribeRequest>,
        on_message: OnMessage,
    ) -> Result<bool, ApiError> {
        if let (Some(wanted), Some((active, _))) = (&request, &self.current) {
            if wanted == active {
                return Ok(false);
            }
        }

        self.close();

        let Some(request) = request else {
            return Ok(false);
        };
        if request.level.is_silent() {
            return Ok(false);
        }

        let handle = self.source.subscribe(&request, on_message)?;
        self.current = Some((request, handle));
        Ok(true)
    }

    pub fn close(&mut self) {
        // handle drop tears the stream down
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn active_request(&self) -> Option<&SubscribeRequest> {
        self.current.as_ref().map(|(req, _)| req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Counters {
        opened: Cell<usize>,
        dropped: Cell<usize>,
        live: RefCell<Vec<OnMessage>>,
    }

    struct FakeHandle(Rc<Counters>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.dropped.set(self.0.dropped.get() + 1);
            self.0.live.borrow_mut().clear();
        }
    }

    struct FakeSource {
        counters: Rc<Counters>,
        fail: bool,
    }

    impl LogSource for FakeSource {
        type Handle = FakeHandle;

        fn subscribe(
            &self,
            _request: &SubscribeRequest,
            on_message: OnMessage,
        ) -> Result<FakeHandle, ApiError> {
            if self.fail {
                return Err(ApiError::WebSocket("refused".into()));
            }
            self.counters.opened.set(self.counters.opened.get() + 1);
            self.counters.live.borrow_mut().push(on_message);
            Ok(FakeHandle(self.counters.clone()))
        }
    }

    fn feed() -> (LogFeed<FakeSource>, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let source = FakeSource {
            counters: counters.clone(),
            fail: false,
        };
        (LogFeed::new(source), counters)
    }

    fn request(url: &str, level: LogLevel) -> Option<SubscribeRequest> {
        Some(SubscribeRequest {
            config: ApiConfig::new(url, None),
            level,
        })
    }

    fn noop() -> OnMessage {
        Rc::new(|_: LogMessage| {})
    }

    #[test]
    fn first_sync_opens_one_subscription() {
        let (mut feed, counters) = feed();
        assert!(feed.sync(request("http://a", LogLevel::Info), noop()).unwrap());
        assert_eq!(counters.opened.get(), 1);
        assert_eq!(counters.dropped.get(), 0);
        assert!(feed.is_active());
    }

    #[test]
    fn unchanged_request_does_not_resubscribe() {
        let (mut feed, counters) = feed();
        feed.sync(request("http://a", LogLevel::Info), noop()).unwrap();
        assert!(!feed.sync(request("http://a", LogLevel::Info), noop()).unwrap());
        assert_eq!(counters.opened.get(), 1);
        assert_eq!(counters.dropped.get(), 0);
    }

    #[test]
    fn level_change_replaces_subscription_exactly_once() {
        let (mut feed, counters) = feed();
        feed.sync(request("http://a", LogLevel::Info), noop()).unwrap();
        feed.sync(request("http://a", LogLevel::Debug), noop()).unwrap();
        assert_eq!(counters.opened.get(), 2);
        assert_eq!(counters.dropped.get(), 1);
        assert_eq!(counters.live.borrow().len(), 1);
        assert_eq!(
            feed.active_request().map(|r| r.level.clone()),
            Some(LogLevel::Debug)
        );
    }

    #[test]
    fn config_change_replaces_subscription_exactly_once() {
        let (mut feed, counters) = feed();
        feed.sync(request("http://a", LogLevel::Info), noop()).unwrap();
        feed.sync(request("http://b", LogLevel::Info), noop()).unwrap();
        assert_eq!(counters.opened.get(), 2);
        assert_eq!(counters.dropped.get(), 1);
    }

    #[test]
    fn silent_level_or_missing_request_only_closes() {
        let (mut feed, counters) = feed();
        feed.sync(request("http://a", LogLevel::Info), noop()).unwrap();
        assert!(!feed.sync(request("http://a", LogLevel::Silent), noop()).unwrap());
        assert!(!feed.is_active());
        assert_eq!(counters.dropped.get(), 1);

        feed.sync(request("http://a", LogLevel::Info), noop()).unwrap();
        assert!(!feed.sync(None, noop()).unwrap());
        assert_eq!(counters.opened.get(), 2);
        assert_eq!(counters.dropped.get(), 2);
    }

    #[test]
    fn controller_switch_opens_one_stream_once_level_is_known() {
        let (mut feed, counters) = feed();
        let old = ApiConfig::new("http://a", None);
        let new = ApiConfig::new("http://b", None);
        feed.sync(request_for(Some(LogLevel::Debug), old.clone()), noop())
            .unwrap();
        assert_eq!(counters.opened.get(), 1);

        // switching controllers clears the level before replacing the config
        feed.sync(request_for(None, old), noop()).unwrap();
        assert!(!feed.is_active());
        feed.sync(request_for(None, new.clone()), noop()).unwrap();
        assert_eq!(counters.opened.get(), 1);

        // the new controller reports its own level
        assert!(feed.sync(request_for(Some(LogLevel::Info), new), noop()).unwrap());
        assert_eq!(counters.opened.get(), 2);
        assert_eq!(counters.dropped.get(), 1);
        assert_eq!(
            feed.active_request().map(|r| r.config.base_url.as_str()),
            Some("http://b")
        );
    }

    #[test]
    fn messages_reach_the_live_callback() {
        let (mut feed, counters) = feed();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        feed.sync(
            request("http://a", LogLevel::Info),
            Rc::new(move |m: LogMessage| sink.borrow_mut().push(m.payload)),
        )
        .unwrap();

        for cb in counters.live.borrow().iter() {
            cb(LogMessage::new(LogLevel::Info, "hello"));
        }
        assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
    }

    #[test]
    fn failed_subscribe_leaves_feed_closed() {
        let counters = Rc::new(Counters::default());
        let mut feed = LogFeed::new(FakeSource {
            counters: counters.clone(),
            fail: true,
        });
        assert!(feed.sync(request("http://a", LogLevel::Info), noop()).is_err());
        assert!(!feed.is_active());
    }
}
