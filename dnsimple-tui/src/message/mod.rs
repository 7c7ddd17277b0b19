//! Message layer: everything that can change the model.
//!
//!     app.rs       AppMessage, the single type consumed by `update::update`
//!     result.rs    typed results of background tasks, one enum per component
//!     task.rs      Task, the description of a backend call to run
//!
//! Terminal input becomes `AppMessage::Key` / `Paste` / `Resize` in the
//! event layer. Task results come back tagged with the component that asked
//! for them:
//!
//!     update ──Task──▶ Dispatcher ──spawn──▶ backend call
//!        ▲                                        │
//!        └──── AppMessage::Browser(Zones, ..) ◀───┘
//!
//! so a result lands in the browser that issued it even if the user has
//! switched tabs in the meantime.

mod app;
mod result;
mod task;

pub use app::AppMessage;
pub use result::{
    AuthMessage, BrowserMessage, DashboardMessage, DetailPayload, HomeMessage, ListPayload,
    Validated,
};
pub use task::{BrowserRequest, DashboardRequest, DetailTarget, Task};
