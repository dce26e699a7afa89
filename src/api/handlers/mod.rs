// HTTP request handlers

pub mod signup;
