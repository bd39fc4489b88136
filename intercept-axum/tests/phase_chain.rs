//! Drives a whole call through the phase contexts the way a pipeline does:
//! receive transforms in registration order, a respond transform, the
//! conversion step, then an after-transform rewrite of the finalized
//! content.

use axum::body::Body;
use bytes::Bytes;
use http::{HeaderName, HeaderValue, StatusCode};
use http_body_util::BodyExt;
use intercept_axum::PhaseState;
use intercept_axum::prelude::*;

async fn read_to_string(body: Body) -> Result<String, InterceptError> {
    let collected = body
        .collect()
        .await
        .map_err(|err| InterceptError::Transform(err.into()))?;
    Ok(String::from_utf8_lossy(&collected.to_bytes()).into_owned())
}

#[tokio::test]
async fn test_full_phase_walk() {
    // Receive phase, two interceptors in registration order. The first
    // yields another stream, the second consumes it into the declared type.
    let mut receive = PhaseState::new(ReceiveRequest::new(
        TypeInfo::of::<String>(),
        Body::from("  42  "),
        false,
    ));

    CallReceiveContext::new(&mut receive)
        .transform_request_body(|body| async move {
            let text = read_to_string(body).await?;
            Ok(Body::from(text.trim().to_owned()))
        })
        .await
        .unwrap();
    CallReceiveContext::new(&mut receive)
        .transform_request_body(read_to_string)
        .await
        .unwrap();

    let request = receive.subject();
    assert_eq!(
        request.value().downcast_ref::<String>(),
        Some(&"42".to_string())
    );
    assert_eq!(request.type_info(), TypeInfo::of::<String>());
    assert!(!request.is_reusable());

    // Respond phase, operating on the unconstrained response object.
    let mut respond: PhaseState<BoxedSubject> = PhaseState::new(Box::new(200_i32));
    CallRespondContext::new(&mut respond)
        .transform_response_body(|value| async move {
            let status = value.downcast_ref::<i32>().copied().unwrap_or(500);
            Ok(format!("answer for {status}: 42"))
        })
        .await
        .unwrap();

    // Conversion step, owned by the pipeline: response object becomes
    // wire-ready content, exactly once.
    let text = respond.subject().downcast_ref::<String>().cloned().unwrap();
    let mut late: PhaseState<BoxedSubject> = PhaseState::new(Box::new(OutgoingContent::new(
        StatusCode::OK,
        Bytes::from(text),
    )));

    CallRespondAfterTransformContext::new(&mut late)
        .transform_response_body(|content| async move {
            Ok(content.with_header(
                HeaderName::from_static("x-trace"),
                HeaderValue::from_static("abc"),
            ))
        })
        .await
        .unwrap();

    let content = late.subject().downcast_ref::<OutgoingContent>().unwrap();
    assert_eq!(content.payload(), &Bytes::from("answer for 200: 42"));
    assert_eq!(
        content.headers().get("x-trace"),
        Some(&HeaderValue::from_static("abc"))
    );
}

#[tokio::test]
async fn test_phase_loop_honors_finish_flag() {
    fn noop_interceptor(_ctx: CallContext<'_>) {}

    // The loop owns the state and checks the flag between interceptors.
    let mut phase = PhaseState::new(());
    let mut ran = 0;
    for _ in 0..3 {
        if phase.is_finished() {
            break;
        }
        noop_interceptor(CallContext::new(&mut phase));
        ran += 1;
        phase.finish();
    }
    assert_eq!(ran, 1);
}

#[tokio::test]
async fn test_receive_chain_aborts_on_type_mismatch() {
    let mut receive = PhaseState::new(ReceiveRequest::new(
        TypeInfo::of::<String>(),
        Body::from("42"),
        false,
    ));

    CallReceiveContext::new(&mut receive)
        .transform_request_body(read_to_string)
        .await
        .unwrap();

    // The stream is gone now; a second stream transform must fail without
    // touching the typed value the first one produced.
    let err = CallReceiveContext::new(&mut receive)
        .transform_request_body(read_to_string)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InterceptError::UnexpectedSubjectType { expected: "Body", .. }
    ));
    assert_eq!(
        receive.subject().value().downcast_ref::<String>(),
        Some(&"42".to_string())
    );
}
