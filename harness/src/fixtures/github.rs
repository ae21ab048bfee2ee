//! GitHub API v3.
//!
//! <https://developer.github.com/v3/>
//!
//! Wildcard routes and PATCH endpoints stay commented out so that every
//! contender can load the same table.

use routebench_types::Route;

pub const ROUTES: &[Route] = &[
    // OAuth Authorizations
    Route::new("GET", "/authorizations"),
    Route::new("GET", "/authorizations/:id"),
    Route::new("POST", "/authorizations"),
    // Route::new("PUT", "/authorizations/clients/:client_id"),
    // Route::new("PATCH", "/authorizations/:id"),
    Route::new("DELETE", "/authorizations/:id"),
    Route::new("GET", "/applications/:client_id/tokens/:access_token"),
    Route::new("DELETE", "/applications/:client_id/tokens"),
    Route::new("DELETE", "/applications/:client_id/tokens/:access_token"),
    // Activity
    Route::new("GET", "/events"),
    Route::new("GET", "/repos/:owner/:repo/events"),
    Route::new("GET", "/networks/:owner/:repo/events"),
    Route::new("GET", "/orgs/:org/events"),
    Route::new("GET", "/users/:user/received_events"),
    Route::new("GET", "/users/:user/received_events/public"),
    Route::new("GET", "/users/:user/events"),
    Route::new("GET", "/users/:user/events/public"),
    Route::new("GET", "/users/:user/events/orgs/:org"),
    Route::new("GET", "/feeds"),
    Route::new("GET", "/notifications"),
    Route::new("GET", "/repos/:owner/:repo/notifications"),
    Route::new("PUT", "/notifications"),
    Route::new("PUT", "/repos/:owner/:repo/notifications"),
    Route::new("GET", "/notifications/threads/:id"),
    // Route::new("PATCH", "/notifications/threads/:id"),
    Route::new("GET", "/notifications/threads/:id/subscription"),
    Route::new("PUT", "/notifications/threads/:id/subscription"),
    Route::new("DELETE", "/notifications/threads/:id/subscription"),
    Route::new("GET", "/repos/:owner/:repo/stargazers"),
    Route::new("GET", "/users/:user/starred"),
    Route::new("GET", "/user/starred"),
    Route::new("GET", "/user/starred/:owner/:repo"),
    Route::new("PUT", "/user/starred/:owner/:repo"),
    Route::new("DELETE", "/user/starred/:owner/:repo"),
    Route::new("GET", "/repos/:owner/:repo/subscribers"),
    Route::new("GET", "/users/:user/subscriptions"),
    Route::new("GET", "/user/subscriptions"),
    Route::new("GET", "/repos/:owner/:repo/subscription"),
    Route::new("PUT", "/repos/:owner/:repo/subscription"),
    Route::new("DELETE", "/repos/:owner/:repo/subscription"),
    Route::new("GET", "/user/subscriptions/:owner/:repo"),
    Route::new("PUT", "/user/subscriptions/:owner/:repo"),
    Route::new("DELETE", "/user/subscriptions/:owner/:repo"),
    // Gists
    Route::new("GET", "/users/:user/gists"),
    Route::new("GET", "/gists"),
    // Route::new("GET", "/gists/public"),
    // Route::new("GET", "/gists/starred"),
    Route::new("GET", "/gists/:id"),
    Route::new("POST", "/gists"),
    // Route::new("PATCH", "/gists/:id"),
    Route::new("PUT", "/gists/:id/star"),
    Route::new("DELETE", "/gists/:id/star"),
    Route::new("GET", "/gists/:id/star"),
    Route::new("POST", "/gists/:id/forks"),
    Route::new("DELETE", "/gists/:id"),
    // Git Data
    Route::new("GET", "/repos/:owner/:repo/git/blobs/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/blobs"),
    Route::new("GET", "/repos/:owner/:repo/git/commits/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/commits"),
    // Route::new("GET", "/repos/:owner/:repo/git/refs/*ref"),
    Route::new("GET", "/repos/:owner/:repo/git/refs"),
    Route::new("POST", "/repos/:owner/:repo/git/refs"),
    // Route::new("PATCH", "/repos/:owner/:repo/git/refs/*ref"),
    // Route::new("DELETE", "/repos/:owner/:repo/git/refs/*ref"),
    Route::new("GET", "/repos/:owner/:repo/git/tags/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/tags"),
    Route::new("GET", "/repos/:owner/:repo/git/trees/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/trees"),
    // Issues
    Route::new("GET", "/issues"),
    Route::new("GET", "/user/issues"),
    Route::new("GET", "/orgs/:org/issues"),
    Route::new("GET", "/repos/:owner/:repo/issues"),
    Route::new("GET", "/repos/:owner/:repo/issues/:number"),
    Route::new("POST", "/repos/:owner/:repo/issues"),
    // Route::new("PATCH", "/repos/:owner/:repo/issues/:number"),
    Route::new("GET", "/repos/:owner/:repo/assignees"),
    Route::new("GET", "/repos/:owner/:repo/assignees/:assignee"),
    Route::new("GET", "/repos/:owner/:repo/issues/:number/comments"),
    // Route::new("GET", "/repos/:owner/:repo/issues/comments"),
    // Route::new("GET", "/repos/:owner/:repo/issues/comments/:id"),
    Route::new("POST", "/repos/:owner/:repo/issues/:number/comments"),
    // Route::new("PATCH", "/repos/:owner/:repo/issues/comments/:id"),
    // Route::new("DELETE", "/repos/:owner/:repo/issues/comments/:id"),
    Route::new("GET", "/repos/:owner/:repo/issues/:number/events"),
    // Route::new("GET", "/repos/:owner/:repo/issues/events"),
    // Route::new("GET", "/repos/:owner/:repo/issues/events/:id"),
    Route::new("GET", "/repos/:owner/:repo/labels"),
    Route::new("GET", "/repos/:owner/:repo/labels/:name"),
    Route::new("POST", "/repos/:owner/:repo/labels"),
    // Route::new("PATCH", "/repos/:owner/:repo/labels/:name"),
    Route::new("DELETE", "/repos/:owner/:repo/labels/:name"),
    Route::new("GET", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("POST", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("DELETE", "/repos/:owner/:repo/issues/:number/labels/:name"),
    Route::new("PUT", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("DELETE", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("GET", "/repos/:owner/:repo/milestones/:number/labels"),
    Route::new("GET", "/repos/:owner/:repo/milestones"),
    Route::new("GET", "/repos/:owner/:repo/milestones/:number"),
    Route::new("POST", "/repos/:owner/:repo/milestones"),
    // Route::new("PATCH", "/repos/:owner/:repo/milestones/:number"),
    Route::new("DELETE", "/repos/:owner/:repo/milestones/:number"),
    // Miscellaneous
    Route::new("GET", "/emojis"),
    Route::new("GET", "/gitignore/templates"),
    Route::new("GET", "/gitignore/templates/:name"),
    Route::new("POST", "/markdown"),
    Route::new("POST", "/markdown/raw"),
    Route::new("GET", "/meta"),
    Route::new("GET", "/rate_limit"),
    // Organizations
    Route::new("GET", "/users/:user/orgs"),
    Route::new("GET", "/user/orgs"),
    Route::new("GET", "/orgs/:org"),
    // Route::new("PATCH", "/orgs/:org"),
    Route::new("GET", "/orgs/:org/members"),
    Route::new("GET", "/orgs/:org/members/:user"),
    Route::new("DELETE", "/orgs/:org/members/:user"),
    Route::new("GET", "/orgs/:org/public_members"),
    Route::new("GET", "/orgs/:org/public_members/:user"),
    Route::new("PUT", "/orgs/:org/public_members/:user"),
    Route::new("DELETE", "/orgs/:org/public_members/:user"),
    Route::new("GET", "/orgs/:org/teams"),
    Route::new("GET", "/teams/:id"),
    Route::new("POST", "/orgs/:org/teams"),
    // Route::new("PATCH", "/teams/:id"),
    Route::new("DELETE", "/teams/:id"),
    Route::new("GET", "/teams/:id/members"),
    Route::new("GET", "/teams/:id/members/:user"),
    Route::new("PUT", "/teams/:id/members/:user"),
    Route::new("DELETE", "/teams/:id/members/:user"),
    Route::new("GET", "/teams/:id/repos"),
    Route::new("GET", "/teams/:id/repos/:owner/:repo"),
    Route::new("PUT", "/teams/:id/repos/:owner/:repo"),
    Route::new("DELETE", "/teams/:id/repos/:owner/:repo"),
    Route::new("GET", "/user/teams"),
    // Pull Requests
    Route::new("GET", "/repos/:owner/:repo/pulls"),
    Route::new("GET", "/repos/:owner/:repo/pulls/:number"),
    Route::new("POST", "/repos/:owner/:repo/pulls"),
    // Route::new("PATCH", "/repos/:owner/:repo/pulls/:number"),
    Route::new("GET", "/repos/:owner/:repo/pulls/:number/commits"),
    Route::new("GET", "/repos/:owner/:repo/pulls/:number/files"),
    Route::new("GET", "/repos/:owner/:repo/pulls/:number/merge"),
    Route::new("PUT", "/repos/:owner/:repo/pulls/:number/merge"),
    Route::new("GET", "/repos/:owner/:repo/pulls/:number/comments"),
    // Route::new("GET", "/repos/:owner/:repo/pulls/comments"),
    // Route::new("GET", "/repos/:owner/:repo/pulls/comments/:number"),
    Route::new("PUT", "/repos/:owner/:repo/pulls/:number/comments"),
    // Route::new("PATCH", "/repos/:owner/:repo/pulls/comments/:number"),
    // Route::new("DELETE", "/repos/:owner/:repo/pulls/comments/:number"),
    // Repositories
    Route::new("GET", "/user/repos"),
    Route::new("GET", "/users/:user/repos"),
    Route::new("GET", "/orgs/:org/repos"),
    Route::new("GET", "/repositories"),
    Route::new("POST", "/user/repos"),
    Route::new("POST", "/orgs/:org/repos"),
    Route::new("GET", "/repos/:owner/:repo"),
    // Route::new("PATCH", "/repos/:owner/:repo"),
    Route::new("GET", "/repos/:owner/:repo/contributors"),
    Route::new("GET", "/repos/:owner/:repo/languages"),
    Route::new("GET", "/repos/:owner/:repo/teams"),
    Route::new("GET", "/repos/:owner/:repo/tags"),
    Route::new("GET", "/repos/:owner/:repo/branches"),
    Route::new("GET", "/repos/:owner/:repo/branches/:branch"),
    Route::new("DELETE", "/repos/:owner/:repo"),
    Route::new("GET", "/repos/:owner/:repo/collaborators"),
    Route::new("GET", "/repos/:owner/:repo/collaborators/:user"),
    Route::new("PUT", "/repos/:owner/:repo/collaborators/:user"),
    Route::new("DELETE", "/repos/:owner/:repo/collaborators/:user"),
    Route::new("GET", "/repos/:owner/:repo/comments"),
    Route::new("GET", "/repos/:owner/:repo/commits/:sha/comments"),
    Route::new("POST", "/repos/:owner/:repo/commits/:sha/comments"),
    Route::new("GET", "/repos/:owner/:repo/comments/:id"),
    // Route::new("PATCH", "/repos/:owner/:repo/comments/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/comments/:id"),
    Route::new("GET", "/repos/:owner/:repo/commits"),
    Route::new("GET", "/repos/:owner/:repo/commits/:sha"),
    Route::new("GET", "/repos/:owner/:repo/readme"),
    // Route::new("GET", "/repos/:owner/:repo/contents/*path"),
    // Route::new("PUT", "/repos/:owner/:repo/contents/*path"),
    // Route::new("DELETE", "/repos/:owner/:repo/contents/*path"),
    // Route::new("GET", "/repos/:owner/:repo/:archive_format/:ref"),
    Route::new("GET", "/repos/:owner/:repo/keys"),
    Route::new("GET", "/repos/:owner/:repo/keys/:id"),
    Route::new("POST", "/repos/:owner/:repo/keys"),
    // Route::new("PATCH", "/repos/:owner/:repo/keys/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/keys/:id"),
    Route::new("GET", "/repos/:owner/:repo/downloads"),
    Route::new("GET", "/repos/:owner/:repo/downloads/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/downloads/:id"),
    Route::new("GET", "/repos/:owner/:repo/forks"),
    Route::new("POST", "/repos/:owner/:repo/forks"),
    Route::new("GET", "/repos/:owner/:repo/hooks"),
    Route::new("GET", "/repos/:owner/:repo/hooks/:id"),
    Route::new("POST", "/repos/:owner/:repo/hooks"),
    // Route::new("PATCH", "/repos/:owner/:repo/hooks/:id"),
    Route::new("POST", "/repos/:owner/:repo/hooks/:id/tests"),
    Route::new("DELETE", "/repos/:owner/:repo/hooks/:id"),
    Route::new("POST", "/repos/:owner/:repo/merges"),
    Route::new("GET", "/repos/:owner/:repo/releases"),
    Route::new("GET", "/repos/:owner/:repo/releases/:id"),
    Route::new("POST", "/repos/:owner/:repo/releases"),
    // Route::new("PATCH", "/repos/:owner/:repo/releases/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/releases/:id"),
    Route::new("GET", "/repos/:owner/:repo/releases/:id/assets"),
    Route::new("GET", "/repos/:owner/:repo/stats/contributors"),
    Route::new("GET", "/repos/:owner/:repo/stats/commit_activity"),
    Route::new("GET", "/repos/:owner/:repo/stats/code_frequency"),
    Route::new("GET", "/repos/:owner/:repo/stats/participation"),
    Route::new("GET", "/repos/:owner/:repo/stats/punch_card"),
    Route::new("GET", "/repos/:owner/:repo/statuses/:ref"),
    Route::new("POST", "/repos/:owner/:repo/statuses/:ref"),
    // Search
    Route::new("GET", "/search/repositories"),
    Route::new("GET", "/search/code"),
    Route::new("GET", "/search/issues"),
    Route::new("GET", "/search/users"),
    Route::new("GET", "/legacy/issues/search/:owner/:repository/:state/:keyword"),
    Route::new("GET", "/legacy/repos/search/:keyword"),
    Route::new("GET", "/legacy/user/search/:keyword"),
    Route::new("GET", "/legacy/user/email/:email"),
    // Users
    Route::new("GET", "/users/:user"),
    Route::new("GET", "/user"),
    // Route::new("PATCH", "/user"),
    Route::new("GET", "/users"),
    Route::new("GET", "/user/emails"),
    Route::new("POST", "/user/emails"),
    Route::new("DELETE", "/user/emails"),
    Route::new("GET", "/users/:user/followers"),
    Route::new("GET", "/user/followers"),
    Route::new("GET", "/users/:user/following"),
    Route::new("GET", "/user/following"),
    Route::new("GET", "/user/following/:user"),
    Route::new("GET", "/users/:user/following/:target_user"),
    Route::new("PUT", "/user/following/:user"),
    Route::new("DELETE", "/user/following/:user"),
    Route::new("GET", "/users/:user/keys"),
    Route::new("GET", "/user/keys"),
    Route::new("GET", "/user/keys/:id"),
    Route::new("POST", "/user/keys"),
    // Route::new("PATCH", "/user/keys/:id"),
    Route::new("DELETE", "/user/keys/:id"),
];
