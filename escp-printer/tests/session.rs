use escp_printer::{
    Alignment, ConnectOptions, MissingCharacter, Orientation, PageBuilder, PageSettings,
    PrintError, PrinterSession, TcpTransport,
};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection and collect everything sent until the peer closes
async fn capture_printer() -> (u16, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    (port, handle)
}

#[tokio::test]
async fn test_full_print_job_over_tcp() {
    let (port, server) = capture_printer().await;

    let mut page = PageBuilder::new();
    page.set_missing_policy(MissingCharacter::Replace);
    page.line_feed_dots(0)
        .unwrap()
        .bold(true)
        .text("Bold ö")
        .unwrap()
        .bold(false)
        .alignment(Some(Alignment::Center))
        .text("ā")
        .unwrap();

    let settings = PageSettings::new().with_orientation(Orientation::Landscape);

    let mut printer = PrinterSession::connect("127.0.0.1", port).await.unwrap();
    printer.set_page_settings(&settings).await.unwrap();
    printer.print(&page, true).await.unwrap();
    printer.disconnect().await.unwrap();

    let mut expected = vec![0x1B, 0x69, 0x61, 0x00, 0x1B, 0x40];
    expected.extend_from_slice(&settings.encode());
    expected.extend_from_slice(&[0x1B, 0x33, 0x00]);
    expected.extend_from_slice(&[0x1B, 0x45, b'B', b'o', b'l', b'd', b' ', 0x94]);
    expected.extend_from_slice(&[0x1B, 0x46]);
    expected.extend_from_slice(&[0x1B, 0x61, 0x01, 0xB0]);
    expected.push(0x0C);

    assert_eq!(server.await.unwrap(), expected);
}

#[tokio::test]
async fn test_print_without_feed_over_tcp() {
    let (port, server) = capture_printer().await;

    let mut page = PageBuilder::with_width(5);
    page.line("-=").unwrap();

    let mut printer = PrinterSession::<TcpTransport>::connect_with(
        "127.0.0.1",
        port,
        &ConnectOptions::default().with_timeout(Duration::from_secs(5)),
    )
    .await
    .unwrap();
    printer.print(&page, false).await.unwrap();
    printer.send_raw(&[0x1B, 0x40]).await.unwrap();
    printer.disconnect().await.unwrap();

    assert_eq!(
        server.await.unwrap(),
        b"\x1Bia\x00\x1B@-=-=-\x1B@".to_vec()
    );
}

#[tokio::test]
async fn test_session_closed_after_disconnect() {
    let (port, server) = capture_printer().await;

    let mut printer = PrinterSession::connect("127.0.0.1", port).await.unwrap();
    printer.disconnect().await.unwrap();

    let err = printer.print(&PageBuilder::new(), true).await.unwrap_err();
    assert!(matches!(err, PrintError::SessionClosed));
    assert!(!err.is_transport());

    assert_eq!(server.await.unwrap(), vec![0x1B, 0x69, 0x61, 0x00, 0x1B, 0x40]);
}
