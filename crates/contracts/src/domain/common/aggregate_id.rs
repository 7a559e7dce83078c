use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Record id: a string on the wire and a segment in REST paths
pub trait AggregateId:
    Clone + Eq + Hash + Serialize + DeserializeOwned + Debug + Display
{
    fn as_string(&self) -> String {
        self.to_string()
    }

    /// Percent-encoded form for use as a URL path segment
    fn path_segment(&self) -> String {
        urlencoding::encode(&self.as_string()).into_owned()
    }
}
