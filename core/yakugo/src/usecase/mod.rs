//! UseCase レイヤー（履歴ストアとアプリ操作）

pub mod app;
pub mod store;

pub use app::AppUseCase;
pub use store::HistoryStore;
