use crate::model::LogsumError;
use csv::{ReaderBuilder, WriterBuilder};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use kdam::tqdm;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read, Write},
};

fn is_gzip(filepath: &str) -> bool {
    filepath.ends_with(".gz")
}

/// reads every row of a headed CSV file, decompressing when the name ends in `.gz`.
/// columns are matched to fields by header name.
pub fn read_rows<T: DeserializeOwned>(filepath: &str, desc: &str) -> Result<Vec<T>, LogsumError> {
    let f = File::open(filepath)
        .map_err(|e| LogsumError::InputError(format!("failure reading {filepath}: {e}")))?;
    let r: Box<dyn Read> = if is_gzip(filepath) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    let reader = ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(r);
    let rows = tqdm!(reader.into_deserialize::<T>(), desc = desc)
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| {
                LogsumError::InputError(format!("failure reading row {idx} of {filepath}: {e}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    eprintln!();
    log::info!("read {} rows from {filepath}", rows.len());
    Ok(rows)
}

/// writes rows to a headed CSV file, compressing when the name ends in `.gz`
pub fn write_rows<T: Serialize>(
    filepath: &str,
    rows: impl Iterator<Item = T>,
) -> Result<(), LogsumError> {
    let f = File::create(filepath)
        .map_err(|e| LogsumError::OutputError(format!("failure creating {filepath}: {e}")))?;
    let w: Box<dyn Write> = if is_gzip(filepath) {
        Box::new(GzEncoder::new(f, Compression::default()))
    } else {
        Box::new(f)
    };
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(w);
    let mut count = 0;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| LogsumError::OutputError(format!("failure writing {filepath}: {e}")))?;
        count += 1;
    }
    writer.flush()?;
    log::info!("wrote {count} rows to {filepath}");
    Ok(())
}

/// reads 0/1 or true/false columns
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "y" | "yes" => Ok(true),
        "" | "0" | "false" | "f" | "n" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a 0/1 or true/false flag, found '{other}'"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::{deserialize_flag, read_rows, write_rows};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct MockRow {
        id: i64,
        #[serde(deserialize_with = "deserialize_flag")]
        flag: bool,
        #[serde(default)]
        value: f64,
    }

    #[test]
    fn test_gzip_rows_read_back() {
        let dir = std::env::temp_dir().join(format!("bambam-logsum-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("test invariant failed, temp dir");
        let filepath = dir.join("rows.csv.gz");
        let filepath = filepath.to_string_lossy().to_string();
        let rows = vec![
            MockRow { id: 1, flag: true, value: 0.5 },
            MockRow { id: 2, flag: false, value: 0.0 },
        ];
        write_rows(&filepath, rows.iter()).expect("test invariant failed, write");
        let read: Vec<MockRow> = read_rows(&filepath, "mock").expect("test invariant failed, read");
        assert_eq!(read, rows);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_flag_accepts_numeric_codes() {
        let data = "id,flag\n1,1\n2,0\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows = reader
            .deserialize::<MockRow>()
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed, decode");
        assert!(rows[0].flag);
        assert!(!rows[1].flag);
        assert_eq!(rows[1].value, 0.0);
    }
}
