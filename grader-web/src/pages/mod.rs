mod assignment;
mod form_modal;
mod group_tags;
mod layout;

pub use assignment::AssignmentDetail;
pub use form_modal::BoundedFormModal;
pub use group_tags::GroupTags;
pub use layout::AppLayout;
