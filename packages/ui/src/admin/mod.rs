//! Admin dashboard components for buses, routes and schedules.

mod add_form;
mod bus_list;
mod confirm_dialog;
mod dashboard;
mod notice_banner;
mod route_list;
mod schedule_list;
mod update_schedule_modal;

pub use add_form::AddForm;
pub use bus_list::BusList;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard::AdminDashboard;
pub use notice_banner::NoticeBanner;
pub use route_list::RouteList;
pub use schedule_list::ScheduleList;
pub use update_schedule_modal::UpdateScheduleModal;
