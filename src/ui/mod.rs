mod layout;
mod notifications;
mod result_list;
mod search_box;
mod status_bar;

pub use layout::draw;
