//! Пример: чтение и проверка заголовка файла захвата
//!
//! Демонстрирует:
//! - валидацию магических констант при открытии
//! - вывод версии формата и смещения данных

use std::fs::File;

use mrcap_core::{read_sample_file_header, SampleFileHeaderExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mrcap-core/test_output.mrcap".to_string());

    let mut file = File::open(&input_path)?;
    let header = match read_sample_file_header(&mut file) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("✗ Header validation failed: {e}");
            return Err(Box::new(e));
        }
    };

    println!("✓ Header validated");
    println!("  Magic header  : {:#010x}", header.header);
    println!("  Magic trailer : {:#010x}", header.trailer);
    println!("  Version info  : {:#x}", header.version_info);
    println!("  Version       : {}", header.version_number());
    println!("  Multi-codec   : {}", header.is_multi_codec());
    println!("  Data offset   : {}", header.file_offset);

    Ok(())
}
