mod readiness;
mod worker;
