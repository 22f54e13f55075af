pub mod views;

pub use views::{
    render_activity_list, render_help, render_logs, render_menu, render_service_list,
    render_spot_list, render_stats,
};
