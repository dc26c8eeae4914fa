pub mod state;

pub mod prelude {
    pub use super::state::AppState;
}
