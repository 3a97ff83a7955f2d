//! Leaf handles: strings, data buffers, booleans and dates.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;

/// Immutable UTF-8 string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CfString(Arc<str>);

impl CfString {
    pub fn new(s: &str) -> Self {
        CfString(Arc::from(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes of the UTF-8 encoding.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfString) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Immutable byte buffer. A zero-length buffer is a valid object, not a null.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CfData(Arc<[u8]>);

impl CfData {
    pub fn new(bytes: &[u8]) -> Self {
        CfData(Arc::from(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfData) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

lazy_static! {
    static ref BOOLEAN_TRUE: Arc<bool> = Arc::new(true);
    static ref BOOLEAN_FALSE: Arc<bool> = Arc::new(false);
}

/// Boolean handle. Only two objects exist, shared process-wide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CfBoolean(Arc<bool>);

impl CfBoolean {
    pub fn true_value() -> Self {
        CfBoolean(BOOLEAN_TRUE.clone())
    }

    pub fn false_value() -> Self {
        CfBoolean(BOOLEAN_FALSE.clone())
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::true_value()
        } else {
            Self::false_value()
        }
    }

    pub fn value(&self) -> bool {
        *self.0
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfBoolean) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<bool> for CfBoolean {
    fn from(value: bool) -> Self {
        CfBoolean::from_bool(value)
    }
}

/// Seconds between the Unix epoch and the reference date (2001-01-01T00:00:00Z).
pub const ABSOLUTE_TIME_INTERVAL_SINCE_1970: f64 = 978_307_200.0;

/// Point in time, stored as seconds relative to 2001-01-01T00:00:00Z.
#[derive(Clone, Debug, PartialEq)]
pub struct CfDate(Arc<f64>);

impl CfDate {
    pub fn new(absolute_time: f64) -> Self {
        CfDate(Arc::new(absolute_time))
    }

    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::new(seconds - ABSOLUTE_TIME_INTERVAL_SINCE_1970)
    }

    pub fn now() -> Self {
        let unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self::from_unix_seconds(unix)
    }

    /// Seconds since 2001-01-01T00:00:00Z.
    pub fn absolute_time(&self) -> f64 {
        *self.0
    }

    pub fn unix_seconds(&self) -> f64 {
        *self.0 + ABSOLUTE_TIME_INTERVAL_SINCE_1970
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfDate) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
