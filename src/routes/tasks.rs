use crate::{
    error::AppError,
    models::{Task, TaskInput},
    query::{build_list_query, TaskQuery, TASK_COLUMNS},
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// Retrieves the task collection, filtered and sorted.
///
/// ## Query Parameters:
/// - `priority` (optional): filter by priority; `All` disables the filter.
/// - `status` (optional): filter by status; `All` disables the filter.
/// - `sortBy` (optional): `priority` for High/Medium/Low rank order (unknown
///   priorities last), `dueDate` for due-date order; anything else sorts by
///   creation time, most recent first.
/// - `order` (optional): `desc` for descending, anything else ascending.
///
/// ## Responses:
/// - `200 OK`: the materialized, ordered JSON array of tasks.
/// - `500 Internal Server Error`: for database errors.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    params: web::Query<TaskQuery>,
) -> Result<impl Responder, AppError> {
    let (sql, binds) = build_list_query(&params);

    let mut query = sqlx::query_as::<_, Task>(&sql);
    for value in &binds {
        query = query.bind(value.as_str());
    }
    let tasks = query.fetch_all(&**pool).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a single task by id.
///
/// A malformed id fails path deserialization with 400; a well-formed id with
/// no matching document returns `null` with 200.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task: Option<Task> =
        sqlx::query_as(&format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS))
            .bind(task_id.into_inner())
            .fetch_optional(&**pool)
            .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Creates a new task.
///
/// The body is stored as supplied; every field is optional and no format
/// validation is applied. The server assigns the id and creation timestamp.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = Task::new(task_data.into_inner());

    sqlx::query(
        "INSERT INTO tasks (id, title, description, due_date, priority, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.due_date)
    .bind(&task.priority)
    .bind(&task.status)
    .bind(task.created_at)
    .execute(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Task Created Successfully",
        "result": { "insertedId": task.id }
    })))
}

/// Partially updates a task.
///
/// The supplied fields are merged over the existing document with
/// first-truthy-wins semantics: unsupplied or empty values never overwrite
/// stored ones. Updating an unknown id is a 404 rather than a merge against
/// nothing.
#[patch("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task_uuid = task_id.into_inner();

    let existing: Option<Task> =
        sqlx::query_as(&format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS))
            .bind(task_uuid)
            .fetch_optional(&**pool)
            .await?;

    let existing = match existing {
        Some(task) => task,
        None => return Err(AppError::NotFound("Task not found.".into())),
    };

    let merged = existing.clone().merge(task_data.into_inner());

    // A merge that changes nothing is acknowledged as matched but unmodified,
    // the way the store's own update result would report it.
    if merged == existing {
        return Ok(HttpResponse::Ok().json(json!({
            "matchedCount": 1,
            "modifiedCount": 0
        })));
    }

    let result = sqlx::query(
        "UPDATE tasks
         SET title = $1, description = $2, due_date = $3, priority = $4, status = $5
         WHERE id = $6",
    )
    .bind(&merged.title)
    .bind(&merged.description)
    .bind(&merged.due_date)
    .bind(&merged.priority)
    .bind(&merged.status)
    .bind(task_uuid)
    .execute(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "matchedCount": 1,
        "modifiedCount": result.rows_affected()
    })))
}

/// Deletes a task by id.
///
/// Always acknowledges with the number of documents removed; deleting a
/// nonexistent id reports zero rather than an error.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id.into_inner())
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "deletedCount": result.rows_affected()
    })))
}
