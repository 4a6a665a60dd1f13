//! Пример: запись минимального валидного заголовка файла захвата

use std::fs::File;

use mrcap_core::{write_sample_file_header, SampleFileHeaderExt};
use mrcap_types::SampleFileHeader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "mrcap-core/test_output.mrcap";

    let header = SampleFileHeader::new(1);

    let mut file = File::create(output_path)?;
    write_sample_file_header(&mut file, &header)?;

    println!("✓ Записано: {output_path}");
    println!("  Version : {}", header.version_number());
    println!("  Offset  : {}", header.file_offset);

    Ok(())
}
