/*
    * The routes module organizes logical route groupings.
    * Each sub-module defines and registers specific endpoints.
*/

pub mod welcome_route;
