//! Miniature Color FERET trees for tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) struct FeretFixture {
    temp_dir: TempDir,
}

impl FeretFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    fn xml_dir(&self, volume: u8) -> PathBuf {
        self.root()
            .join(format!("dvd{}", volume))
            .join("data/ground_truths/xml")
    }

    fn subject_dir(&self, volume: u8, subject_id: &str) -> PathBuf {
        let dir = self.xml_dir(volume).join(subject_id);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes `<id>/<id>.xml` with the given gender
    pub fn subject(&self, volume: u8, subject_id: &str, gender: &str) {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Subjects>
  <Subject id="{id}">
    <Gender value="{gender}"/>
    <YOB value="1960"/>
    <Race value="White"/>
  </Subject>
</Subjects>
"#,
            id = subject_id,
            gender = gender
        );
        self.raw(volume, subject_id, &format!("{}.xml", subject_id), &xml);
    }

    /// Writes `<id>/<name>.xml` describing one image
    #[allow(clippy::too_many_arguments)]
    pub fn image(
        &self,
        volume: u8,
        subject_id: &str,
        name: &str,
        pose: &str,
        glasses: &str,
        beard: &str,
        mustache: &str,
    ) {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Recordings>
  <Recording id="cfrR{name}">
    <URL root="colorferet/dvd{volume}" relative="data/images/{id}/{name}.ppm.bz2"/>
    <CaptureDate>08/31/1993</CaptureDate>
    <Subject id="{id}">
      <Application>
        <Face>
          <Pose name="{pose}"/>
          <Wearing glasses="{glasses}"/>
          <Hair beard="{beard}" mustache="{mustache}"/>
        </Face>
      </Application>
    </Subject>
  </Recording>
</Recordings>
"#,
            name = name,
            volume = volume,
            id = subject_id,
            pose = pose,
            glasses = glasses,
            beard = beard,
            mustache = mustache
        );
        self.raw(volume, subject_id, &format!("{}.xml", name), &xml);
    }

    /// Writes arbitrary content into a subject directory
    pub fn raw(&self, volume: u8, subject_id: &str, file_name: &str, content: &str) {
        let dir = self.subject_dir(volume, subject_id);
        fs::write(dir.join(file_name), content).unwrap();
    }

    /// Writes a plain file directly in the volume's ground-truth directory
    pub fn file_in_xml_dir(&self, volume: u8, file_name: &str) {
        let dir = self.xml_dir(volume);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), "").unwrap();
    }
}
