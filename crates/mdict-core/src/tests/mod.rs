mod bridge_tests;
mod cache_tests;
mod panel_tests;
mod wordbook_tests;

use std::sync::Arc;

use mdict_api::memory::MemoryApi;
use mdict_config::cache::CacheConfig;
use mdict_config::network::NetworkConfig;

use crate::queries::DataClient;

pub(crate) fn data_client(api: Arc<MemoryApi>) -> DataClient {
    DataClient::new(api, &NetworkConfig::new(), CacheConfig::default())
}
