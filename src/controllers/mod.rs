pub mod welcome_controller;
