pub mod m202608250001_create_users;
pub mod m202608250002_create_technicians;
pub mod m202608250003_create_reports;
