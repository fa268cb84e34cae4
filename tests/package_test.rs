use quick_xml::events::Event;
use quick_xml::Reader;
use siq_pack::{Audio, Image, Pack, PackError, Question, Round, Theme};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn read_entry(path: &Path, name: &str) -> Vec<u8> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut data = Vec::new();
    entry.read_to_end(&mut data).unwrap();
    data
}

fn attribute(xml: &str, name: &str) -> String {
    let start = xml.find(&format!(" {}=\"", name)).unwrap() + name.len() + 3;
    let end = xml[start..].find('"').unwrap();
    xml[start..start + end].to_string()
}

/// Parses the document and returns the round names in order.
fn round_names(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"round" => {
                let name = e.try_get_attribute("name").unwrap().unwrap();
                names.push(name.unescape_value().unwrap().into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {}", e),
        }
    }

    names
}

#[test]
fn test_end_to_end_text_only_pack() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("package.siq");

    let pack = Pack::new(
        "P",
        "T",
        "A",
        vec![Round::new(
            "R1",
            vec![Theme::new("Th", vec![Question::new(100, "Q?", "A").unwrap()])],
        )],
    );

    let saved = pack.save(&output).unwrap();
    assert_eq!(saved, output);

    let file = std::fs::File::open(&output).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(names, vec!["Audio/", "Images/", "content.xml"]);

    let xml = String::from_utf8(read_entry(&output, "content.xml")).unwrap();
    assert_eq!(round_names(&xml), vec!["R1"]);
    assert!(xml.contains("<round name=\"R1\"><themes><theme name=\"Th\"><questions>"));
    assert!(xml.contains("<question price=\"100\">"));
    assert!(xml.contains("<param name=\"question\" type=\"content\"><item>Q?</item></param>"));
    assert!(xml.contains("<right><answer>A</answer></right>"));
    assert!(!xml.contains("name=\"answer\""));
}

#[test]
fn test_image_bytes_are_embedded() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("x.jpg");
    let image_bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    std::fs::write(&image_path, &image_bytes).unwrap();
    let audio_path = temp_dir.path().join("theme.mp3");
    std::fs::write(&audio_path, b"ID3 fake audio").unwrap();

    let question = Question::new(200, Image::new(&image_path), "X")
        .unwrap()
        .with_answer_content(Audio::new(&audio_path));
    let pack = Pack::new(
        "Media",
        "T",
        "A",
        vec![Round::new("R1", vec![Theme::new("Th", vec![question])])],
    );

    let output = temp_dir.path().join("media.siq");
    pack.save(&output).unwrap();

    assert_eq!(read_entry(&output, "Images/x.jpg"), image_bytes);
    assert_eq!(read_entry(&output, "Audio/theme.mp3"), b"ID3 fake audio");

    let xml = String::from_utf8(read_entry(&output, "content.xml")).unwrap();
    assert!(xml.contains("<item type=\"image\" isRef=\"True\">x.jpg</item>"));
    assert!(xml.contains(
        "<param name=\"answer\" type=\"content\"><item type=\"audio\" isRef=\"True\">theme.mp3</item></param>"
    ));
}

#[test]
fn test_one_file_reached_through_two_spellings_is_stored_once() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("img")).unwrap();
    std::fs::write(temp_dir.path().join("img/x.jpg"), b"jpeg").unwrap();

    let question = Question::new(100, Image::new(temp_dir.path().join("img/x.jpg")), "A")
        .unwrap()
        .with_answer_content(Image::new(temp_dir.path().join("img/../img/x.jpg")));
    let pack = Pack::new(
        "P",
        "T",
        "A",
        vec![Round::new("R1", vec![Theme::new("Th", vec![question])])],
    );

    let output = temp_dir.path().join("dedup.siq");
    pack.save(&output).unwrap();

    let file = std::fs::File::open(&output).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.file_names().filter(|n| *n == "Images/x.jpg").count(), 1);
    assert_eq!(read_entry(&output, "Images/x.jpg"), b"jpeg");
}

#[test]
fn test_rounds_keep_order_and_final_marker() {
    let pack = Pack::new(
        "P",
        "T",
        "A",
        vec![
            Round::new("First round", vec![]),
            Round::new("Second round", vec![]),
            Round::final_round(
                "Final round",
                vec![Theme::new(
                    "Country",
                    vec![Question::new(0, "Most populated country", "China").unwrap()],
                )],
            ),
        ],
    );

    let xml = pack.render().unwrap();
    assert_eq!(
        round_names(&xml),
        vec!["First round", "Second round", "Final round"]
    );
    assert_eq!(xml.matches("type=\"final\"").count(), 1);
    assert!(xml.contains("<round name=\"Final round\" type=\"final\">"));
    assert!(xml.contains("<round name=\"First round\"><themes></themes></round>"));
}

#[test]
fn test_renders_differ_only_in_id() {
    let pack = Pack::new(
        "P",
        "T",
        "A",
        vec![Round::new(
            "R1",
            vec![Theme::new("Th", vec![Question::new(100, "Q?", "A").unwrap()])],
        )],
    );

    let first = pack.render().unwrap();
    let second = pack.render().unwrap();

    let first_id = attribute(&first, "id");
    let second_id = attribute(&second, "id");
    assert_ne!(first_id, second_id);
    assert_eq!(attribute(&first, "date"), attribute(&second, "date"));
    assert_eq!(
        first.replace(&first_id, ""),
        second.replace(&second_id, "")
    );
}

#[test]
fn test_missing_media_leaves_no_archive() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("broken.siq");

    let pack = Pack::new(
        "P",
        "T",
        "A",
        vec![Round::new(
            "R1",
            vec![Theme::new(
                "Th",
                vec![Question::new(100, Image::new(temp_dir.path().join("gone.png")), "A").unwrap()],
            )],
        )],
    );

    let result = pack.save(&output);
    assert!(matches!(result, Err(PackError::MediaReadError { .. })));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_destination_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"file").unwrap();

    let pack = Pack::new("P", "T", "A", vec![]);
    let result = pack.save(blocker.join("package.siq"));

    assert!(matches!(result, Err(PackError::IoError(_))));
}

#[test]
fn test_scaled_pack_renders_scaled_prices() {
    let mut pack = Pack::new(
        "P",
        "T",
        "A",
        vec![Round::new(
            "R1",
            vec![Theme::new(
                "Th",
                vec![
                    Question::new(100, "Q1", "A1").unwrap(),
                    Question::new(200, "Q2", "A2").unwrap(),
                ],
            )],
        )],
    );

    pack.scale_price(5);
    let xml = pack.render().unwrap();
    assert!(xml.contains("<question price=\"500\">"));
    assert!(xml.contains("<question price=\"1000\">"));

    pack.shrink_price(5).unwrap();
    let xml = pack.render().unwrap();
    assert!(xml.contains("<question price=\"100\">"));
    assert!(xml.contains("<question price=\"200\">"));
}
