//! Tests for the `io::Write` sink.

use ezlog::{Dispatcher, Level, Logger, Sink, WriterSink};
use std::fs::{self, File};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn writes_lines_to_vec() {
    let sink = WriterSink::new(Vec::<u8>::new());
    sink.deliver("one").unwrap();
    sink.deliver("two").unwrap();
    assert_eq!(sink.into_inner(), b"one\ntwo\n");
}

#[test]
fn newline_can_be_disabled() {
    let sink = WriterSink::new(Vec::<u8>::new()).newline(false);
    sink.deliver("a").unwrap();
    sink.deliver("b").unwrap();
    assert_eq!(sink.into_inner(), b"ab");
}

#[test]
fn logger_writes_to_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let file = File::create(&path).unwrap();

    let mut logger = Logger::new();
    logger
        .set_level(Level::Info)
        .set_sink(WriterSink::new(file));
    logger.info().name("status").msg("ok").out();
    logger.debug().msg("hidden").out();
    drop(logger);

    assert_eq!(fs::read_to_string(path).unwrap(), "status: ok\n");
}

#[test]
fn dispatcher_writes_to_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("err.log");
    let file = File::create(&path).unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.set_level(Level::Warning);
    dispatcher.set_all(WriterSink::new(file));
    dispatcher.err("failed");
    dispatcher.info("skipped");
    dispatcher.msg("banner");
    drop(dispatcher);

    assert_eq!(fs::read_to_string(path).unwrap(), "failed\nbanner\n");
}

#[test]
fn shared_sink_is_usable_from_threads() {
    let sink = Arc::new(WriterSink::new(Vec::<u8>::new()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sink = Arc::clone(&sink);
            std::thread::spawn(move || sink.deliver(&format!("t{i}")).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let sink = Arc::into_inner(sink).unwrap();
    assert_eq!(sink.into_inner().len(), 4 * 3);
}
