//! CLI integration tests for octext
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn octext() -> Command {
    Command::cargo_bin("octext").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    octext()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary-to-text codecs"));
}

#[test]
fn test_version() {
    octext()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("octext"));
}

#[test]
fn test_list_codecs() {
    octext()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base58"))
        .stdout(predicate::str::contains("ascii85"))
        .stdout(predicate::str::contains("rfc1924"));
}

#[test]
fn test_config_codecs() {
    octext()
        .args(["config", "--codecs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base36,base58,base62"));
}

#[test]
fn test_config_settings() {
    octext()
        .args(["config", "--settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_codec = base64"))
        .stdout(predicate::str::contains("data_uri.charset = US-ASCII"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_base64() {
    octext()
        .args(["encode", "base64"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_decode_base64() {
    octext()
        .args(["decode", "base64"])
        .write_stdin("aGVsbG8gd29ybGQ=")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_default_codec() {
    octext()
        .arg("encode")
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");

    octext()
        .arg("decode")
        .write_stdin("aGVsbG8gd29ybGQ=")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_default_codec_from_config_file() {
    let dir = std::env::temp_dir().join(format!("octext-default-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("codecs.toml");
    std::fs::write(&path, "[settings]\ndefault_codec = \"hex\"\n\n[codecs]\n").unwrap();

    octext()
        .arg("--config")
        .arg(&path)
        .arg("encode")
        .write_stdin("AB")
        .assert()
        .success()
        .stdout("4142\n");

    octext()
        .arg("--config")
        .arg(&path)
        .args(["decode", "base64"])
        .write_stdin("QUI=")
        .assert()
        .success()
        .stdout("AB");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_encode_base58() {
    octext()
        .args(["encode", "base58"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("StV1DL6CwTryKyV\n");
}

#[test]
fn test_encode_ascii85() {
    octext()
        .args(["encode", "ascii85"])
        .write_stdin("Man ")
        .assert()
        .success()
        .stdout("9jqo^\n");

    octext()
        .args(["encode", "ascii85_framed"])
        .write_stdin("sure")
        .assert()
        .success()
        .stdout("<~F*2M7~>\n");
}

#[test]
fn test_roundtrip_every_codec() {
    let names = octext()
        .args(["config", "--codecs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let names = String::from_utf8(names).unwrap();

    for name in names.trim().split(',') {
        let encoded = octext()
            .args(["encode", name])
            .write_stdin("\x00\x00round trip")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        octext()
            .args(["decode", name])
            .write_stdin(encoded)
            .assert()
            .success()
            .stdout("\x00\x00round trip");
    }
}

#[test]
fn test_output_file() {
    let dir = std::env::temp_dir().join(format!("octext-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("decoded.bin");

    octext()
        .args(["decode", "hex", "-o"])
        .arg(&out)
        .write_stdin("414243")
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read(&out).unwrap(), b"ABC");
    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_codec() {
    octext()
        .args(["encode", "base63"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("codec 'base63' not found"))
        .stderr(predicate::str::contains("did you mean"));
}

#[test]
fn test_no_color_errors() {
    octext()
        .args(["--no-color", "decode", "base58"])
        .write_stdin("abc0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_invalid_character() {
    octext()
        .args(["decode", "base58"])
        .write_stdin("abc0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '0' at position 3"));
}

#[test]
fn test_odd_hex_length() {
    octext()
        .args(["decode", "hex"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length"));
}

#[test]
fn test_max_size() {
    octext()
        .args(["--max-size", "4", "encode", "base64"])
        .write_stdin("more than four bytes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));

    octext()
        .args(["--max-size", "4", "--force", "encode", "hex"])
        .write_stdin("12345")
        .assert()
        .success()
        .stdout("3132333435\n");
}

#[test]
fn test_large_file_warning() {
    let dir = std::env::temp_dir().join(format!("octext-large-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.bin");
    std::fs::write(&input, "12345").unwrap();

    octext()
        .args(["--no-color", "--max-size", "4", "--force", "encode", "hex"])
        .arg(&input)
        .assert()
        .success()
        .stdout("3132333435\n")
        .stderr(predicate::str::contains("above --max-size"));

    octext()
        .args(["-q", "--max-size", "4", "--force", "encode", "hex"])
        .arg(&input)
        .assert()
        .success()
        .stderr("");

    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Data URIs and MIME
// ============================================================================

#[test]
fn test_data_uri_encode() {
    octext()
        .args(["data-uri", "encode", "--type", "", "--charset", "", "--percent"])
        .write_stdin("A brief note")
        .assert()
        .success()
        .stdout("data:,A%20brief%20note\n");

    octext()
        .args(["data-uri", "encode"])
        .write_stdin("hi")
        .assert()
        .success()
        .stdout("data:text/plain;charset=US-ASCII;base64,aGk=\n");
}

#[test]
fn test_data_uri_decode() {
    octext()
        .args(["data-uri", "decode", "data:,A%20brief%20note"])
        .assert()
        .success()
        .stdout("A brief note");

    octext()
        .args(["data-uri", "decode", "--type", "data:,A%20brief%20note"])
        .assert()
        .success()
        .stdout("text/plain;charset=US-ASCII\n");
}

#[test]
fn test_data_uri_decode_malformed() {
    octext()
        .args(["data-uri", "decode", "http://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_mime_best_match() {
    octext()
        .args([
            "mime",
            "best-match",
            "--supported",
            "application/xbel+xml,text/xml",
            "--accept",
            "text/*;q=0.5,*/*; q=0.1",
        ])
        .assert()
        .success()
        .stdout("text/xml\n");
}

#[test]
fn test_mime_best_match_none() {
    octext()
        .args([
            "mime",
            "best-match",
            "--supported",
            "application/json",
            "--accept",
            "text/html",
        ])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no supported type is acceptable"));

    octext()
        .args([
            "-q",
            "mime",
            "best-match",
            "--supported",
            "application/json",
            "--accept",
            "text/html",
        ])
        .assert()
        .failure()
        .stderr("");
}

#[test]
fn test_mime_parse() {
    octext()
        .args(["mime", "parse", "application/xhtml;q=0.5;ver=1.2"])
        .assert()
        .success()
        .stdout("type: application\nsubtype: xhtml\nparam: q=0.5\nparam: ver=1.2\n");
}

// ============================================================================
// IPv6 and integers
// ============================================================================

#[test]
fn test_ipv6_encode() {
    octext()
        .args(["ipv6", "encode", "1080:0:0:0:8:800:200C:417A"])
        .assert()
        .success()
        .stdout("4)+k&C#VzJ4br>0wv%Yp\n");
}

#[test]
fn test_ipv6_decode() {
    octext()
        .args(["ipv6", "decode", "4)+k&C#VzJ4br>0wv%Yp"])
        .assert()
        .success()
        .stdout("1080::8:800:200c:417a\n");

    octext()
        .args(["ipv6", "decode", "--int", "=r54lj&NUUO~Hi%c2ym0"])
        .assert()
        .success()
        .stdout(format!("{}\n", u128::MAX));
}

#[test]
fn test_ipv6_encode_out_of_range() {
    octext()
        .args(["ipv6", "encode", "340282366920938463463374607431768211456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_int_to_bytes() {
    octext()
        .args(["int", "to-bytes", "123456789", "--fill", "7"])
        .assert()
        .success()
        .stdout("000000075bcd15\n");

    octext()
        .args(["int", "to-bytes", "123456789", "--fill", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit"));

    octext()
        .args(["int", "to-bytes", "123456789", "--fill", "3", "--overflow"])
        .assert()
        .success()
        .stdout("075bcd15\n");
}

#[test]
fn test_int_to_bytes_negative() {
    octext()
        .args(["int", "to-bytes", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_int_from_bytes() {
    octext()
        .args(["int", "from-bytes", "--codec", "hex"])
        .write_stdin("075bcd15\n")
        .assert()
        .success()
        .stdout("123456789\n");
}
