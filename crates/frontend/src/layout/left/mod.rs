pub mod left;
pub mod select_team_modal;
pub mod sidebar;
pub mod sidebar_header;

pub use left::Left;
pub use select_team_modal::SelectTeamModal;
pub use sidebar::AdminSidebar;
pub use sidebar_header::AdminSidebarHeader;
