pub mod todo_check;
pub mod todo_run;
pub mod users_list;
pub mod users_select;
