//! Parse REST API.
//!
//! <https://parse.com/docs/rest#summary>

use routebench_types::Route;

pub const ROUTES: &[Route] = &[
    // Objects
    Route::new("POST", "/1/classes/:className"),
    Route::new("GET", "/1/classes/:className/:objectId"),
    Route::new("PUT", "/1/classes/:className/:objectId"),
    Route::new("GET", "/1/classes/:className"),
    Route::new("DELETE", "/1/classes/:className/:objectId"),
    // Users
    Route::new("POST", "/1/users"),
    Route::new("GET", "/1/login"),
    Route::new("GET", "/1/users/:objectId"),
    Route::new("PUT", "/1/users/:objectId"),
    Route::new("GET", "/1/users"),
    Route::new("DELETE", "/1/users/:objectId"),
    Route::new("POST", "/1/requestPasswordReset"),
    // Roles
    Route::new("POST", "/1/roles"),
    Route::new("GET", "/1/roles/:objectId"),
    Route::new("PUT", "/1/roles/:objectId"),
    Route::new("GET", "/1/roles"),
    Route::new("DELETE", "/1/roles/:objectId"),
    // Files
    Route::new("POST", "/1/files/:fileName"),
    // Analytics
    Route::new("POST", "/1/events/:eventName"),
    // Push Notifications
    Route::new("POST", "/1/push"),
    // Installations
    Route::new("POST", "/1/installations"),
    Route::new("GET", "/1/installations/:objectId"),
    Route::new("PUT", "/1/installations/:objectId"),
    Route::new("GET", "/1/installations"),
    Route::new("DELETE", "/1/installations/:objectId"),
    // Cloud Functions
    Route::new("POST", "/1/functions"),
];
