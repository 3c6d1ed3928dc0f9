mod cors;
mod helpers;
mod scenario;
