#[cfg(test)]
mod tests {

    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};

    use crate::client::TaskService;
    use crate::model::TaskPatch;

    // Needs a running server and a reachable store, see TASKBOARD_API_URL.
    // Run with: cargo test --features e2e

    fn random_title() -> String {
        let suffix: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        format!("e2e task {}", suffix)
    }

    #[tokio::test]
    async fn test_e2e_health() {
        let service = TaskService::from_env();
        service.health().await.unwrap();
    }

    #[tokio::test]
    async fn test_e2e_task_lifecycle() {
        // GIVEN
        let service = TaskService::from_env();
        let title = random_title();

        // WHEN a task is created
        let created = service.create(&title).await.unwrap();

        // THEN it starts unfinished and leads the listing
        assert_eq!(created.title, title);
        assert!(!created.finished);
        let listed = service.list().await.unwrap();
        assert_eq!(listed.first().unwrap().id, created.id);

        // WHEN it is toggled
        let toggled = service
            .update(created.id, &TaskPatch::finish(true))
            .await
            .unwrap();

        // THEN only the flag changed
        assert!(toggled.finished);
        assert_eq!(toggled.title, title);

        // WHEN it is deleted
        service.delete(created.id).await.unwrap();

        // THEN it is gone and a second delete reports 404
        let listed = service.list().await.unwrap();
        assert!(!listed.iter().any(|task| task.id == created.id));
        let err = service.delete(created.id).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_e2e_concurrent_creates() {
        // GIVEN
        let service = TaskService::from_env();
        let titles = [random_title(), random_title()];

        // WHEN two creates race
        let (a, b) = futures::join!(service.create(&titles[0]), service.create(&titles[1]));

        // THEN both land with distinct ids and neither is lost
        let a = a.unwrap();
        let b = b.unwrap();
        assert_ne!(a.id, b.id);

        let listed = service.list().await.unwrap();
        assert!(listed.iter().any(|task| task.id == a.id));
        assert!(listed.iter().any(|task| task.id == b.id));

        // cleanup
        service.delete(a.id).await.unwrap();
        service.delete(b.id).await.unwrap();
    }
}
