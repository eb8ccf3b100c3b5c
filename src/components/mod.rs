//! Stateless view components consuming plain data.

pub mod add_link_form;
pub mod link_list;
