use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Accounts API",
        version = "1.0.0",
        description = "Registration, login and profile updates for alumni, college and student accounts.\n\n**Note:** passwords are stored and compared as plaintext and no tokens are issued."
    ),
    paths(
        // Alumni
        crate::api::alumni::register,
        crate::api::alumni::update_profile,
        crate::api::alumni::replace_profile,
        crate::api::alumni::login,
        crate::api::alumni::list,

        // Colleges
        crate::api::colleges::register,
        crate::api::colleges::update_profile,
        crate::api::colleges::replace_profile,
        crate::api::colleges::login,

        // Students
        crate::api::students::register,
        crate::api::students::update_profile,
        crate::api::students::replace_profile,
        crate::api::students::login,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::RegisterRequest,
            crate::models::LoginRequest,
            crate::models::AlumniInfo,
            crate::models::CollegeInfo,
            crate::models::StudentInfo,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Alumni", description = "Alumni registration, login, profile updates and listing."),
        (name = "Colleges", description = "College registration, login and profile updates."),
        (name = "Students", description = "Student registration, login and profile updates."),
        (name = "Health", description = "Service and database status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/register/alumnilist",
            "/register/colleges",
            "/register/students",
            "/update/alumni/{id}",
            "/update/college/{id}",
            "/update/student/{id}",
            "/login-alumnilist",
            "/login-colleges",
            "/login-students",
            "/api/alumni",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
