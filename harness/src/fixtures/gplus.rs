//! Google+ API.
//!
//! <https://developers.google.com/+/api/latest/>
//! (in reality this is just a subset of a much larger API)

use routebench_types::Route;

pub const ROUTES: &[Route] = &[
    // People
    Route::new("GET", "/people/:userId"),
    Route::new("GET", "/people"),
    Route::new("GET", "/activities/:activityId/people/:collection"),
    Route::new("GET", "/people/:userId/people/:collection"),
    Route::new("GET", "/people/:userId/openIdConnect"),
    // Activities
    Route::new("GET", "/people/:userId/activities/:collection"),
    Route::new("GET", "/activities/:activityId"),
    Route::new("GET", "/activities"),
    // Comments
    Route::new("GET", "/activities/:activityId/comments"),
    Route::new("GET", "/comments/:commentId"),
    // Moments
    Route::new("POST", "/people/:userId/moments/:collection"),
    Route::new("GET", "/people/:userId/moments/:collection"),
    Route::new("DELETE", "/moments/:id"),
];
