//! Rocket assembly

use rocket::{Build, Rocket, routes};
use tasker_infrastructure::AppContext;

use crate::catchers;
use crate::handlers::{health, tasks, users};

/// Build the Rocket instance over a wired application context
///
/// Used both by [`crate::run`] and by the HTTP tests.
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .mount(
            "/",
            routes![
                users::register,
                users::login,
                users::promote,
                tasks::list_tasks,
                tasks::get_task,
                tasks::create_task,
                tasks::update_task,
                tasks::delete_task,
                health::health,
            ],
        )
        .register("/", catchers::all())
}
