use fittrack_client::{create, search_exercises, Error, ExerciseClient, ExerciseDbConfig, MockExerciseClient};
use fittrack_model::exercise::{BodyPartFilter, Exercise, SEARCH_LIMIT};
use httpmock::prelude::*;
use mockall::predicate::eq;
use serde_json::json;

fn config(server: &MockServer) -> ExerciseDbConfig {
    ExerciseDbConfig {
        url: server.base_url(),
        host: "exercisedb.test".to_owned(),
        api_key: "test-key".to_owned(),
    }
}

fn exercise(id: &str, name: &str, body_part: &str) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        body_part: body_part.to_owned(),
        equipment: "dumbbell".to_owned(),
        target: "biceps".to_owned(),
        gif_url: None,
    }
}

#[tokio::test]
async fn body_parts_sends_api_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/exercises/bodyPartList")
                .header("x-rapidapi-key", "test-key")
                .header("x-rapidapi-host", "exercisedb.test");
            then.status(200).json_body(json!(["back", "cardio", "chest"]));
        })
        .await;

    let client = create(config(&server));
    let parts = client.body_parts().await.unwrap();

    mock.assert_async().await;
    assert_eq!(parts, vec!["back", "cardio", "chest"]);
}

#[tokio::test]
async fn exercises_for_body_part() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/exercises/bodyPart/chest");
            then.status(200).json_body(json!([{
                "id": "0025",
                "name": "barbell bench press",
                "bodyPart": "chest",
                "equipment": "barbell",
                "target": "pectorals",
                "gifUrl": "https://example.com/0025.gif"
            }]));
        })
        .await;

    let client = create(config(&server));
    let exercises = client
        .exercises(&BodyPartFilter::Only("chest".to_owned()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].target, "pectorals");
}

#[tokio::test]
async fn all_exercises_under_base_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/exercises");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = create(ExerciseDbConfig {
        url: server.url("/api/"),
        ..config(&server)
    });
    let exercises = client.exercises(&BodyPartFilter::All).await.unwrap();

    mock.assert_async().await;
    assert!(exercises.is_empty());
}

#[tokio::test]
async fn http_status_mapping() {
    let test_data = [(401u16, "client"), (429, "client"), (500, "server"), (503, "server")];

    for (i, (status, kind)) in test_data.into_iter().enumerate() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/exercises/bodyPartList");
                then.status(status);
            })
            .await;

        let result = create(config(&server)).body_parts().await;

        match (kind, result) {
            ("client", Err(Error::RequestError)) => {}
            ("server", Err(Error::InternalServerError)) => {}
            (_, other) => panic!("Test case #{}: unexpected {:?}", i, other),
        }
    }
}

#[tokio::test]
async fn undecodable_body_is_response_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/exercises");
            then.status(200).body("<html>rate limited</html>");
        })
        .await;

    let result = create(config(&server)).exercises(&BodyPartFilter::All).await;

    assert!(matches!(result, Err(Error::ResponseError)));
}

#[tokio::test]
async fn unreachable_server_is_communication_error() {
    let client = create(ExerciseDbConfig {
        url: "http://127.0.0.1:1".to_owned(),
        host: "exercisedb.test".to_owned(),
        api_key: "test-key".to_owned(),
    });

    assert!(matches!(
        client.body_parts().await,
        Err(Error::CommunicationError)
    ));
}

#[tokio::test]
async fn search_filters_by_name() {
    let mut client = MockExerciseClient::new();
    client
        .expect_exercises()
        .with(eq(BodyPartFilter::Only("upper arms".to_owned())))
        .returning(|_| {
            Ok(vec![
                exercise("1", "Dumbbell Curl", "upper arms"),
                exercise("2", "triceps dip", "upper arms"),
                exercise("3", "hammer curl", "upper arms"),
            ])
        });

    let found = search_exercises(&client, "CURL", &BodyPartFilter::Only("upper arms".to_owned()))
        .await
        .unwrap();

    assert_eq!(
        found.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "3"]
    );
}

#[tokio::test]
async fn search_is_capped() {
    let mut client = MockExerciseClient::new();
    client.expect_exercises().returning(|_| {
        Ok((0..50)
            .map(|i| exercise(&i.to_string(), "push-up", "chest"))
            .collect())
    });

    let found = search_exercises(&client, "push", &BodyPartFilter::All)
        .await
        .unwrap();

    assert_eq!(found.len(), SEARCH_LIMIT);
}

#[tokio::test]
async fn search_propagates_errors() {
    let mut client = MockExerciseClient::new();
    client
        .expect_exercises()
        .returning(|_| Err(Error::CommunicationError));

    let result = search_exercises(&client, "squat", &BodyPartFilter::All).await;

    assert!(matches!(result, Err(Error::CommunicationError)));
}
