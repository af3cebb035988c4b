pub mod asset;
pub mod contract;
pub mod error;
pub mod mock_querier;
pub mod msg;
pub mod query;
pub mod rescue;
pub mod state;
