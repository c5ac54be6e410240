//! Storage layer abstraction trait definition

mod bucket_store;

pub use bucket_store::{
    BucketDump, BucketStore, APP_NAME_KEY, NETWORK_PREFIX_KEY, RECORDS_BUCKET, SYSTEM_BUCKET,
    VERSION_KEY,
};
