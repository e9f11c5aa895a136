//! Display widgets.

pub mod breadcrumbs;
pub mod keylist;
pub mod table;

pub use breadcrumbs::{Breadcrumbs, BreadcrumbsTheme};
pub use keylist::{KeyList, KeyListOptions, KeyListTheme};
pub use table::{
    Column, ColumnLayout, MoveDirection, Row, ScrollState, Table, TableError, TableKeymap,
    TableOptions, TableStyles,
};
