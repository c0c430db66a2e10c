/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - start_time
    * - access_log
*/

pub mod access_log;
pub mod start_time;
