use chrono::NaiveDate;
use postgres::{
    types::{private::BytesMut, to_sql_checked, IsNull, Kind, ToSql, Type},
    Row,
};
use std::error::Error as StdError;
use towel_core::{
    err,
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn StdError + Sync + Send>>
    where
        Self: Sized,
    {
        // Domains (e.g. `information_schema.sql_identifier`) use the wire
        // format of their base type.
        if let Kind::Domain(inner) = ty.kind() {
            return self.to_sql(inner, out);
        }

        match &self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::String(value) => value.as_str().to_sql(ty, out),
            CoreValue::Date(value) => value.to_sql(ty, out),
        }
    }

    fn accepts(_: &Type) -> bool {
        // Checked per value in `to_sql`.
        true
    }

    to_sql_checked!();
}

/// Converts a PostgreSQL value within a row to a towel value of type `ty`.
pub(crate) fn from_row(row: &Row, index: usize, ty: stmt::Type) -> Result<CoreValue> {
    let column_ty = row.columns()[index].type_().clone();

    let value = match column_ty {
        Type::INT2 => get::<i16>(row, index)?.map(|v| CoreValue::I64(v.into())),
        Type::INT4 => get::<i32>(row, index)?.map(|v| CoreValue::I64(v.into())),
        Type::INT8 => get::<i64>(row, index)?.map(CoreValue::I64),
        Type::FLOAT4 => get::<f32>(row, index)?.map(|v| CoreValue::F64(v.into())),
        Type::FLOAT8 => get::<f64>(row, index)?.map(CoreValue::F64),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            get::<String>(row, index)?.map(CoreValue::String)
        }
        Type::DATE => get::<NaiveDate>(row, index)?.map(CoreValue::Date),
        other => return Err(err!("unsupported PostgreSQL column type `{other}`")),
    };

    let value = value.unwrap_or(CoreValue::Null);

    if value.is_a(ty) {
        Ok(value)
    } else {
        Err(err!("cannot read PostgreSQL value {value} as {ty}"))
    }
}

fn get<'a, T>(row: &'a Row, index: usize) -> Result<Option<T>>
where
    T: postgres::types::FromSql<'a>,
{
    row.try_get::<_, Option<T>>(index)
        .map_err(Error::driver_operation_failed)
}
