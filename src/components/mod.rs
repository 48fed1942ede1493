pub mod attractions_list;
pub mod rating_picker;
pub mod review_form;
pub mod reviews_list;
