pub mod rows;
pub mod snapshot;
pub mod summary;
pub mod table;

pub use rows::{
    ExecutionRow, OpportunityRow, OpportunitySortKey, RiskRow, RiskSortKey, RouteRow, StrategyRow,
    TokenRow, TokenSortKey,
};
pub use snapshot::{EngineConfig, FeedResults, LoadState, Snapshot};
pub use summary::{DashboardSummary, VolatilityAlert};
pub use table::{project, SortOrder, TableQuery, TableRow};
