use adaptive_quiz::client::{HttpQuizClient, QuizService};
use adaptive_quiz::error::ClientError;
use adaptive_quiz::model::QuestionKind;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Servidor HTTP mínimo: responde en orden a una petición por respuesta
/// guionizada y devuelve las peticiones recibidas (línea inicial + cuerpo).
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            seen.push(read_request(&mut stream));
            let reply = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
        }
        seen
    });

    (base, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        if n == 0 {
            break buf.len();
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request_line = head.lines().next().unwrap_or_default().to_string();
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    format!("{request_line}\n{body}")
}

fn client(base: &str) -> HttpQuizClient {
    HttpQuizClient::new(base, Duration::from_secs(5)).unwrap()
}

#[test]
fn start_accepts_any_2xx_and_rejects_errors() {
    let (base, server) = serve(vec![
        (200, r#"{"message":"New quiz session started. User stats reset."}"#),
        (503, ""),
    ]);
    let c = client(&base);
    assert!(c.start_session().is_ok());
    assert!(matches!(
        c.start_session(),
        Err(ClientError::Status { status: 503, .. })
    ));
    let seen = server.join().unwrap();
    assert!(seen[0].starts_with("GET /start_quiz "));
}

#[test]
fn question_payload_becomes_typed_question() {
    let (base, server) = serve(vec![(
        200,
        r#"{"questionText":"Which is not a pillar of OOP?","topic":"OOP Concepts","difficulty":1,"type":"MC","options":["A) Encapsulation","B) Compilation","C) Inheritance","D) Polymorphism"]}"#,
    )]);
    let q = client(&base).fetch_question().unwrap();
    assert_eq!(q.topic, "OOP Concepts");
    assert_eq!(q.text, "Which is not a pillar of OOP?");
    match q.kind {
        QuestionKind::MultipleChoice { options } => assert_eq!(options.len(), 4),
        other => panic!("se esperaba MC, llegó {other:?}"),
    }
    assert!(server.join().unwrap()[0].starts_with("GET /get_question "));
}

#[test]
fn not_found_on_question_means_exhaustion() {
    let (base, server) = serve(vec![
        (404, r#"{"error":"No more questions available!"}"#),
        (500, r#"{"error":"boom"}"#),
    ]);
    let c = client(&base);
    assert_eq!(
        c.fetch_question(),
        Err(ClientError::Exhausted("No more questions available!".into()))
    );
    // otros códigos no son agotamiento
    assert!(matches!(
        c.fetch_question(),
        Err(ClientError::Status { status: 500, .. })
    ));
    server.join().unwrap();
}

#[test]
fn submit_posts_raw_answer_and_reads_verdict() {
    let (base, server) = serve(vec![(
        200,
        r#"{"isCorrect":false,"correctAnswerString":"B) Compilation"}"#,
    )]);
    let verdict = client(&base).submit_answer("C").unwrap();
    assert!(!verdict.is_correct);
    assert_eq!(verdict.correct_answer, "B) Compilation");

    let seen = server.join().unwrap();
    assert!(seen[0].starts_with("POST /submit_answer "));
    assert!(seen[0].ends_with(r#"{"answer":"C"}"#));
}

#[test]
fn stats_and_malformed_json() {
    let (base, server) = serve(vec![
        (
            200,
            r#"{"username":"QuizUser","overallDifficulty":3,"topics":[{"topic":"Pointers","correct":2,"attempted":3,"score":66.66666666666667}]}"#,
        ),
        (200, "not json"),
    ]);
    let c = client(&base);
    let stats = c.fetch_stats().unwrap();
    assert_eq!(stats.overall_difficulty, 3);
    assert_eq!(stats.topics[0].attempted, 3);
    assert!(stats.message.is_none());

    assert!(matches!(c.fetch_stats(), Err(ClientError::Decode(_))));
    server.join().unwrap();
}

#[test]
fn unreachable_server_is_connectivity_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let c = HttpQuizClient::new(&format!("{base}/"), Duration::from_secs(2)).unwrap();
    assert_eq!(c.endpoint(), base);
    assert!(matches!(c.start_session(), Err(ClientError::Connectivity(_))));
}
