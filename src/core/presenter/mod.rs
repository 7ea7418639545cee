//=========================================================================
// Presenter System
//=========================================================================
//
// Caller side of the notification queue.
//
// Architecture:
//   NotificationSender ──channel──> NotificationPresenter ──> ViewCommand
//                                     ├─ NotificationQueue
//                                     └─ TemplateRegistry
//
// Flow:
//   update(dt) → expire timers → inbox commands → promote pending
//
//=========================================================================

//=== Module Declarations =================================================

mod command;
mod inbox;
mod presenter;
mod template;

//=== Public API ==========================================================

pub use command::{NotificationCommand, NotificationSender, SubmitError, ViewCommand};
pub use presenter::{NotificationPresenter, PresenterBuilder};
pub use template::{NotificationTemplate, TemplateRegistry};
