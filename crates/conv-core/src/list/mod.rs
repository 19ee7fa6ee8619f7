pub mod category_filter;
pub mod list_query;
pub mod pipeline;
pub mod sex_filter;
pub mod sort;
